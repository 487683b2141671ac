// Lookup table of unit-length gradient vectors for gradient noise.
//
// The 256 entries are uniformly distributed on the unit sphere and were
// produced once by rejection sampling from a fixed-seed xorshift generator.
// The table is part of the noise definition: changing any entry changes
// every gradient-noise value, so it must never be regenerated.

/// Number of entries in [`RANDOM_VECTORS`].
pub const RANDOM_VECTOR_COUNT: usize = 256;

/// Unit gradient vectors indexed by the folded lattice hash.
pub static RANDOM_VECTORS: [[f64; 3]; RANDOM_VECTOR_COUNT] = [
    [-0.07467625489343359, 0.4894965697041966, 0.8688017985725603],
    [0.9569042903654474, -0.2767998213599321, 0.0878409811836648],
    [0.7735642349212191, -0.5741580977756492, 0.268217921118998],
    [0.45913461566888697, 0.5691721899440786, -0.6820838825898506],
    [0.8693169607698228, -0.48569241852267375, 0.0916018357213132],
    [-0.08950422775578429, 0.11616777527991214, 0.9891885771683558],
    [-0.7326648540749712, 0.23742006229295412, -0.6378353436617563],
    [-0.7022325295563201, -0.6794271626230085, 0.21271625495711463],
    [-0.9758578746161753, 0.14913178559989385, 0.1595654068819066],
    [-0.7919249467229545, 0.04754838881113191, 0.6087643464258654],
    [-0.8164967010844524, 0.12605322337863223, 0.56342144261118],
    [0.8874032700473536, -0.24911889350436736, -0.38788556715663347],
    [-0.10780581160311585, -0.9910690902212649, -0.07848544701145446],
    [-0.10027322405425376, -0.906155995053079, -0.410885133786962],
    [-0.7711982363610014, -0.0008413210646496497, 0.6365945117675359],
    [-0.9210593751798871, 0.3789703016885107, 0.08961661582181643],
    [-0.9777472872132964, -0.06789389775761556, -0.19849599742644214],
    [0.5346089112946562, -0.6730169695469873, -0.5111178637712948],
    [-0.8095990587802576, 0.4655856943483216, 0.35746234100994756],
    [-0.4485288787283516, -0.5668929396445564, -0.6909806364347998],
    [-0.6107425556010817, 0.2103857781592107, 0.7633684268596672],
    [0.09107017326195875, -0.7678533782826578, 0.6341193996416971],
    [-0.9468548269573391, 0.24654058684470614, 0.20660028002366196],
    [-0.93869274680949, -0.19556713310953694, 0.28391798733889934],
    [0.7593020311201869, 0.364099551500018, -0.5393439923965451],
    [0.28158750944101313, 0.07928647754100832, -0.9562542177715853],
    [0.10786727856029986, -0.29756973491133043, 0.9485867925924307],
    [0.5704553275741474, 0.8155073005765001, -0.09761435319000097],
    [0.36490856692967766, 0.9242060339449596, -0.11262745935630974],
    [-0.49789417254680085, 0.5320885938515604, -0.6848234233997882],
    [0.7825734631310746, 0.511293918767604, -0.3551862939843026],
    [0.7374642946047746, 0.07677364891760916, -0.6710083613599446],
    [0.2569581592811543, -0.9111914430921786, -0.32202897138989545],
    [-0.9061637791151514, 0.008666849709116261, -0.4228381382229688],
    [-0.7072932720897496, -0.33537343162483696, -0.6223028913774677],
    [-0.8237767578127235, 0.5615136649906255, 0.07806572433759158],
    [0.7650494881664825, -0.197541243968832, 0.6129247405574761],
    [-0.5927384783199032, -0.21952764794209423, -0.7748991599608414],
    [-0.8369297108301192, 0.4988469191403591, -0.22516751629394696],
    [0.26775895887205386, 0.8134486370797742, 0.5163394762913366],
    [-0.42889843489681145, -0.422225231952602, -0.7986062772390643],
    [-0.6205992377600388, -0.3806584606771558, -0.6855331665255571],
    [0.5149738534110558, 0.08239763966450159, 0.8532365201283214],
    [0.06666473188495797, -0.851240917713251, 0.5205234995016162],
    [0.17507205325540592, 0.12904192541953186, 0.976062476306182],
    [-0.6469203854453491, -0.11285280071717883, 0.7541606329327524],
    [-0.9684040858441382, 0.18911164681050355, 0.16257401871454835],
    [-0.5099768794530909, 0.8342192235894242, -0.20976622563498099],
    [0.1852457011619055, 0.6765569456811678, -0.712709428485132],
    [-0.41577095813231, -0.8115980354911568, -0.4104182490589763],
    [0.299510254148418, -0.4704079931035695, 0.8300662188549913],
    [-0.5547213553407969, -0.7318039536295488, -0.39591311089812437],
    [0.18060233401781647, -0.3846816497971765, 0.9052087191673749],
    [-0.6203353153558803, -0.6200703887044675, 0.4803090771307694],
    [-0.07114997476183198, 0.3685364816535801, -0.9268864778287529],
    [-0.5343873278211925, -0.05653950112964397, 0.8433465887024958],
    [0.06088802098000717, -0.4222556807756741, 0.9044295378600867],
    [0.4441919120530813, 0.875042069006911, 0.1923406424413009],
    [-0.9354891793981561, -0.3299113432726602, -0.12656421614735106],
    [-0.7583310789144767, 0.02122820897695007, -0.6515238582707746],
    [-0.6684922563806694, -0.08580235333256638, 0.738753043527859],
    [-0.18705003001694598, -0.7458523063918053, 0.6393094894655359],
    [-0.9882045168531479, 0.13602099467379833, 0.07035710254826595],
    [0.7796576696549077, -0.6261948918695779, 0.003724989225047115],
    [-0.5365437814571825, 0.7463654965648564, 0.3937757180389906],
    [0.0406274069571135, -0.9670149109480026, -0.25145889486786444],
    [0.7203424871655627, -0.3879645538903974, -0.5749697436463557],
    [0.4787737350219276, 0.13760779700337727, -0.8670869649908424],
    [-0.5016533438053197, -0.0016953597332229984, -0.8650670774016987],
    [-0.32904802343594913, -0.8697589649636505, 0.36775908029340965],
    [-0.2536082137418515, -0.8542781810721006, -0.4537528658496943],
    [-0.9813505382724071, -0.1563911080068197, -0.1117718317325799],
    [0.894827386430051, 0.42991057863769616, 0.12025324473861562],
    [0.2144072151165785, 0.5546236874840604, 0.8040038006051567],
    [-0.7797474431185308, -0.09961751657492042, 0.6181183344162822],
    [0.4950947920422281, -0.8669761586910854, -0.056863759582996096],
    [0.9900991062986298, -0.021785944458761558, 0.13866914700355756],
    [0.5207445484509704, 0.5226399933964205, -0.6750352232003782],
    [-0.01352134903445274, 0.024285858288146927, 0.9996136104553082],
    [-0.07846611609911847, 0.2096776561898159, 0.9746170268977785],
    [0.7224835002071179, -0.6835693262470834, 0.1036849465572496],
    [0.044580251751781326, -0.3578968024680872, -0.9326963492674702],
    [0.22074431003566805, 0.5629410116278759, -0.7964730799055675],
    [0.4596707126116517, -0.7407533742543085, 0.48988496047332647],
    [0.631823090420642, -0.7645539880573629, 0.1275020853040881],
    [-0.5716733484738449, 0.7415571507693715, 0.351116184172011],
    [0.7008645546020912, -0.7132042353683861, 0.011339962742801336],
    [0.5604317248103651, 0.7089847553600395, 0.4280851533201593],
    [0.2934968196466142, -0.655885494471415, -0.6954666311184962],
    [0.345243149115756, 0.5682026830147874, -0.7469624348007288],
    [-0.9746500681889102, 0.20777673895870302, 0.08298235551633742],
    [-0.9588226230859024, 0.2212147711536824, 0.17811008529023162],
    [0.1379184058414129, 0.8922144825731709, 0.43003701051985316],
    [0.3308464578283895, 0.35425032344963514, -0.8746698403844941],
    [0.04834522938097949, -0.7738313617543492, 0.6315439512508294],
    [-0.858916462292906, 0.2689951745375561, 0.43577988351660857],
    [0.5525470660798137, 0.8088050479057, -0.2013110385668116],
    [0.9816200831732983, 0.0799293971511048, 0.17330119382712794],
    [0.07087892178130469, -0.39619646308234824, -0.9154258796255201],
    [0.6146182806742497, 0.5739044493237868, 0.5411820877554895],
    [-0.2998851008547694, -0.6254271073120867, -0.7203539822369001],
    [0.8339656393896088, -0.5125231624765488, 0.20450261671313197],
    [-0.5290838277986588, -0.5717888365889254, -0.6269990665975527],
    [-0.31997524818368644, 0.2459594948642308, -0.9149424940595561],
    [0.2469063112993505, -0.27391074822389616, 0.9295214765931843],
    [0.9325946216256538, 0.28743153662153986, 0.21828967788304598],
    [0.5677018551456723, 0.6174991547249049, 0.544434934200764],
    [0.12317167101148928, -0.9354071270095362, 0.33142457090566324],
    [-0.4141067290357194, 0.06742849362218396, -0.907727390362977],
    [-0.021946999278950708, -0.9984407353110945, 0.051326672345775565],
    [0.07337887905242965, 0.15152577538100587, -0.9857258642767744],
    [0.07777058654752107, -0.33216127757189257, -0.9400109688455038],
    [-0.08268197927262863, -0.9097269519545576, 0.40689134076683253],
    [0.8917403149928094, 0.4092566082610473, 0.19315340848969983],
    [0.040842480038742614, -0.9527576168497796, 0.30097311401355037],
    [0.49301158962541863, 0.5036772662377947, -0.7094002988230548],
    [0.8109962400158681, -0.4436897192724284, -0.38134568529364266],
    [0.8910678839498, 0.3101860520760802, 0.3313346334005567],
    [0.44151763295000246, -0.8139547648606833, -0.3775444616926817],
    [-0.9101232888116305, 0.12153584651195891, 0.39611189981534634],
    [-0.3949130670707301, -0.716798822892951, -0.5746678318438128],
    [-0.7436114347638826, 0.264654957133071, -0.6140030844819041],
    [-0.4694576560830817, 0.5442010013034057, 0.6953091250122851],
    [-0.19179830943540502, 0.5961929409358098, 0.7795943725271692],
    [0.6072187256285719, -0.26606434442314647, 0.7486622628880758],
    [-0.8766777788076532, -0.038287594173413354, -0.479552012066774],
    [-0.37193545965234, -0.681827128736128, -0.6299014052791515],
    [0.9137416944428605, 0.06108118213849911, -0.4016779867322255],
    [-0.5317955335619464, 0.8144011738771095, -0.2322589900760582],
    [-0.8493940246312832, 0.0021091525362412562, 0.5277550022465443],
    [0.22479342199841437, -0.6851363421826655, -0.6928608157825064],
    [0.46904277189400057, -0.7666591244741724, 0.43844345700955334],
    [-0.027086300200687446, 0.8720314747525845, -0.4886997435872774],
    [0.7987971928992511, 0.5751122711296649, 0.17654721808160953],
    [-0.26057568399679737, 0.7390030243132968, 0.6212687365105397],
    [-0.7645916612003283, -0.3282354768177425, 0.5546720322687558],
    [0.13603235396588537, 0.09396330174865221, 0.9862383568889378],
    [-0.20578909381782834, 0.507638116739914, 0.8366327696775872],
    [-0.6696953504860135, -0.7408433632108588, -0.051567904008589266],
    [-0.6705173929551544, -0.34522356028276, -0.6566788554311145],
    [-0.03986806098422204, 0.9643919213807346, -0.26145508158942593],
    [-0.4704694172838721, -0.6988716543717509, -0.5387364273151259],
    [-0.8037404912031193, 0.08679531272876066, -0.5886151514265372],
    [-0.2171810083823994, -0.8812074142886877, -0.41988796434364406],
    [0.7210168655534791, -0.12257807261721372, -0.6819892196368543],
    [-0.7330781379255175, 0.38231755273505735, 0.5625208730050224],
    [-0.6503201414209641, 0.41246700423765503, -0.6379299993552832],
    [0.45612477638090804, -0.2527685462600132, 0.8532632948821052],
    [0.61639247999037, -0.6620482568463526, -0.4263243087345917],
    [-0.9989689219823036, -0.044605331451077264, 0.00845324314413729],
    [-0.18717656412114134, 0.254464764427897, 0.9487953506992217],
    [0.9628363559445625, -0.23628024455805752, 0.13083500182665284],
    [-0.2799180196699461, -0.4156513783803256, 0.8653784339319944],
    [0.01037998740087682, -0.8949563409191359, 0.44603296258257535],
    [-0.3668086032812931, 0.7387606953958847, -0.565406122620737],
    [0.9983743000235846, -0.030842149743284374, 0.04793244049316012],
    [-0.7003100381184697, 0.07851796473896899, 0.7095074204853374],
    [0.029160904928506075, -0.6682430953935669, 0.7433712444549998],
    [-0.8554776897815286, -0.08836283322242088, -0.5102449725288484],
    [-0.7421249619979425, 0.4440471340098869, 0.5020684052568516],
    [0.8649054731462427, -0.3339073489079059, -0.3747591291309235],
    [-0.2912324386870386, -0.6532089553208955, -0.6989289859098595],
    [-0.830420109619537, -0.03487744409654264, -0.5560449670959794],
    [-0.8566900812527992, 0.011052029938489433, 0.5157130571522415],
    [0.3930992554284885, -0.06068210882843107, -0.9174915024400511],
    [-0.4300587978517731, -0.08000129299137379, 0.8992492554959365],
    [-0.30643352402340557, -0.8258461268597478, -0.47336737330043194],
    [0.0329161768725496, -0.7666622791741016, 0.6412062655586476],
    [0.26747571763536776, -0.689711236385576, -0.6728708277811762],
    [0.9715787426130897, -0.23475063825164522, -0.03044478186508516],
    [0.733631935874034, -0.0569922933258832, 0.677152908261623],
    [-0.2244413000731196, 0.9544516733650844, 0.1965912155516573],
    [-0.6600084849975352, 0.5506817809938265, -0.5110170014908757],
    [0.19139964390597605, 0.979948025381419, -0.055389925651902025],
    [0.005383348764669963, 0.9809915894027657, 0.1939755682479455],
    [-0.452140085736595, 0.4095628801758446, -0.7923557219154609],
    [0.23371129766208262, 0.9489697659795786, 0.2117437427688699],
    [0.4144170141911809, 0.10258589812812992, -0.9042868305212188],
    [-0.8595023263294913, 0.45637867938362164, 0.23016136087157268],
    [0.32135906997524744, 0.4215245980609066, -0.8479654246337142],
    [0.3107458858420109, 0.23583279324571427, -0.9207713549313903],
    [-0.02440709451760466, 0.0072364275895780575, -0.9996759114097675],
    [0.12946811692422255, 0.9914611399495978, -0.015582511669812739],
    [0.21492051561544404, 0.8584795617774894, -0.4656415080058064],
    [-0.1707955895252719, 0.8843710118522532, 0.43441544631163465],
    [0.759114366028511, 0.1737766200871494, -0.6273332970600384],
    [0.6389596156119042, -0.688794633839256, -0.3424800169518403],
    [0.8599707093475673, -0.47967619204442646, 0.1742444542876485],
    [-0.15105802636997334, -0.410037959826355, 0.8994722586998717],
    [-0.939733777827618, 0.2510869939806007, 0.2320684128950315],
    [0.5394549040675174, 0.7929366390773507, -0.2832664697528121],
    [0.015863497776509687, -0.9260865257025827, -0.37697758069998594],
    [0.32714333679924534, 0.7581177038926391, -0.5641230222499418],
    [0.18578362400908766, -0.9812989288714398, 0.050367223924044885],
    [0.2510271297589725, -0.5875557275216957, 0.7692617546592466],
    [0.45527823673040596, -0.8869138070630741, -0.07813850523612773],
    [-0.4127808483055055, 0.2675251945928675, 0.8706562131692598],
    [0.5746870874828988, 0.7759026944777223, 0.26021099166375194],
    [-0.556797035879046, 0.43402862355344557, -0.7082345760922787],
    [-0.8770791958790755, -0.10377863822360762, 0.4690011496836311],
    [0.6026939094133972, -0.4217415295394332, -0.6774172523768015],
    [-0.6161080033878299, -0.72740255868341, -0.3021530171656244],
    [0.7876123038671412, -0.49412909986131404, -0.3681077172069901],
    [-0.8814381481848783, -0.1381524060434464, -0.45164222967833645],
    [-0.5731823749800944, 0.7729680477260255, -0.2719969893340646],
    [-0.33995299328995326, 0.8335826075892125, -0.4353986663713726],
    [-0.7164054037178985, 0.2547577202757504, 0.6495088925362741],
    [-0.23789891925423776, 0.9708104243676078, 0.030515965605740707],
    [0.6038200799815955, 0.657866171027366, -0.45012599572654344],
    [-0.5012494864763061, -0.32289161800673966, -0.8028013174679207],
    [0.7963664620340134, -0.38677437056699193, -0.4649796172091154],
    [-0.552818432299165, -0.7306745870335445, 0.40063253584007963],
    [0.28078642534766896, 0.8570007967091464, -0.43209792614680115],
    [0.9030415146621764, -0.2745879797865689, 0.33032932681397376],
    [0.005984613030399651, 0.6984129076654444, -0.715670032077057],
    [-0.3103830257000813, 0.7904272668831831, -0.5280976359773293],
    [0.5649472084610125, 0.27339317416001424, -0.7785183517264197],
    [0.6331390563143322, -0.5770779396559789, -0.5158643105815787],
    [-0.680494724121492, 0.5903345441234601, -0.4340876138032057],
    [0.4986150581854937, -0.865681125388232, 0.04448834563389203],
    [0.579071865005904, 0.1678346722919707, -0.7978140747913832],
    [-0.9476125378727728, 0.3140109559797741, 0.05854568806488826],
    [0.44819372470178603, 0.7105539326323231, 0.5424347831386551],
    [-0.28893001563905835, -0.44738051260555933, -0.8463865092282605],
    [-0.07324540079169185, -0.3177422907507108, 0.9453438252463255],
    [0.2344794236331325, -0.7862494529821082, 0.5716915230944127],
    [-0.039703172364554604, 0.6501715605247093, 0.7587493657256359],
    [0.1570531628471645, -0.48940760954065976, 0.8577963020224552],
    [0.034631569963570356, -0.48249304450781744, -0.8752148972472049],
    [-0.09989992780044253, 0.12266709479717881, -0.9874071036201261],
    [0.5679862991865995, -0.04874573790653936, -0.8215932186747026],
    [0.05699881018491659, -0.4600956270058702, -0.8860378940246173],
    [0.8559518457510233, -0.01913290072524006, -0.5167014320332917],
    [-0.9049737699352909, -0.3570244426817533, -0.2314217428352201],
    [0.4295189212002461, 0.8984499398733433, -0.0911109316852947],
    [-0.14188901414344818, -0.9789508461209014, -0.1467063343709853],
    [0.18124926775322245, -0.13016357228781236, -0.9747851801233932],
    [0.8981244063365591, -0.38126324219784247, 0.2191138765377319],
    [-0.9552973967704869, 0.254568545200366, 0.150338749223546],
    [0.3916116890744893, -0.3573441802338438, -0.847906493567084],
    [0.16102986410172077, 0.13826370909966987, -0.9772167260200693],
    [0.5677030235773625, -0.23673107634799562, -0.7884615872141394],
    [0.5097557697562454, -0.338270543654708, 0.7910259758666374],
    [0.7910683711480012, 0.20470461032861575, 0.5764606271719325],
    [-0.1892877025239323, -0.2596764238393527, 0.9469626817225778],
    [0.3080394129419083, 0.25971832109023435, 0.9152366435870423],
    [0.18580148835391092, 0.9537893833186822, 0.236143217548249],
    [-0.08816465046597742, 0.1511905399378547, -0.9845650892863874],
    [0.49155549942422594, 0.6390035524124664, 0.5916482493763063],
    [-0.5286296059058236, -0.49151804918224823, 0.6920699004348698],
    [0.8564767411355697, 0.045428962704980085, 0.5141826535788074],
    [-0.7237548359464745, 0.3954330566019657, 0.5655189078983288],
    [-0.47265074694229514, -0.6460029047361968, -0.5994009663716657],
    [0.08367146473215747, -0.352192108207745, -0.9321801354382958],
    [-0.7657471792817384, 0.6278139344522577, 0.1395740704057787],
    [-0.7319699084603025, 0.0028994069384219016, 0.6813307908409995],
];
